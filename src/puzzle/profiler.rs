pub trait Profiler {
    fn new() -> Self;
    fn explore_node(&mut self, depth: usize);
    fn frontier_size(&mut self, len: usize);
}

pub struct NoProfile;

impl Profiler for NoProfile {
    fn new() -> NoProfile {
        NoProfile
    }

    fn explore_node(&mut self, _depth: usize) {}

    fn frontier_size(&mut self, _len: usize) {}
}

pub struct Profile {
    pub states_explored: u32,
    pub max_depth: usize,
    pub peak_frontier: usize,
    pub states_per_depth: Vec<u32>,
}

impl Profile {
    pub fn print(&self) -> String {
        let per_depth = self
            .states_per_depth
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "States Explored: {}\nMax Depth: {}\nPeak Frontier: {}\nStates Per Depth: {}\n",
            self.states_explored, self.max_depth, self.peak_frontier, per_depth
        )
    }
}

impl Profiler for Profile {
    fn new() -> Profile {
        Profile {
            states_explored: 0,
            max_depth: 0,
            peak_frontier: 0,
            states_per_depth: Vec::new(),
        }
    }

    fn explore_node(&mut self, depth: usize) {
        self.states_explored += 1;

        if depth > self.max_depth {
            self.max_depth = depth;
        }

        if self.states_per_depth.len() <= depth {
            self.states_per_depth.resize(depth + 1, 0);
        }
        self.states_per_depth[depth] += 1;
    }

    fn frontier_size(&mut self, len: usize) {
        if len > self.peak_frontier {
            self.peak_frontier = len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_lists_states_per_depth() {
        let mut profile = Profile::new();
        profile.explore_node(0);
        profile.explore_node(1);
        profile.explore_node(1);
        profile.frontier_size(4);

        assert_eq!(
            profile.print(),
            "States Explored: 3\nMax Depth: 1\nPeak Frontier: 4\nStates Per Depth: 1, 2\n"
        );
    }
}

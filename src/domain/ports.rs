/// Something that can follow a set of paths to the treasure.
pub trait PathFinder {
    /// Replace the paths to follow. `None` clears them.
    fn set_paths(&mut self, paths: Option<Vec<String>>);

    /// Directions from the origin to where the paths end, or `None` when no
    /// paths have been set.
    fn find_treasure(&self) -> Option<String>;
}

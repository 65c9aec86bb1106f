// src/progress.rs
/// Lightweight progress reporting for an aggregation run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once before the first request, with the page cap in force.
    fn begin(&mut self, _max_pages: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each page was fetched and parsed.
    fn page_done(&mut self, _page: u32, _on_page: usize, _so_far: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

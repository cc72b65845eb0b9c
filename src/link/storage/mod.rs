mod io;

pub use io::{read_links_file, write_links_file};

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;

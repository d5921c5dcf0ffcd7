pub mod json_file;
pub mod logs;
#[cfg(test)]
pub(crate) mod testing;

pub mod constants;
pub mod error;
pub mod lstm;
#[cfg(test)]
pub mod test;
pub mod util {
    pub mod file_utils;
    pub mod toy_data;
}

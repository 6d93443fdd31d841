pub mod constants;
pub mod de;
pub mod pagination;
pub mod types;

#[cfg(test)]
pub mod test_helpers;

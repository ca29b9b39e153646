/// Auto-vivification command.
pub mod dig;
/// Path read command.
pub mod get;
/// Path write command.
pub mod set;

mod util;

#[cfg(test)]
mod test_support;

pub mod consts;
pub mod util;

mod text;
pub(crate) mod utils;

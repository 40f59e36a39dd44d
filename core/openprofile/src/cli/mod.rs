pub(crate) mod args;

pub(crate) use args::{parse_args, Config};

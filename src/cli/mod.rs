mod args;
mod runner;

pub(crate) use args::{
    Cli, CollectionAction, Commands, FavoriteAction, FilterAction, ShellLine, UserAction,
};
pub(crate) use runner::{dispatch, run};

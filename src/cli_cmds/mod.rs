mod browse;
mod collection_cmds;
mod engagement;
mod shell;
mod upload_cmds;
mod user_cmds;

pub use browse::{
    cmd_categories, cmd_filter, cmd_home, cmd_list, cmd_related, cmd_search, cmd_show, cmd_tags,
};
pub use collection_cmds::cmd_collection;
pub use engagement::{cmd_download, cmd_like};
pub use shell::run_shell;
pub use upload_cmds::cmd_upload;
pub use user_cmds::{cmd_favorite, cmd_user};

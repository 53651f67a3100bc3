pub(crate) mod local;
pub(crate) mod telegram;

pub(crate) use telegram::download_file;

pub(crate) mod clip_path;

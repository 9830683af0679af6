mod test_history;
mod test_level_files;

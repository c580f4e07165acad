mod test_console;
mod test_replay;

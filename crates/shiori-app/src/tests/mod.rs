mod command_tests;
mod render_tests;

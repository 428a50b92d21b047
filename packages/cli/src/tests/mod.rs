mod api_tests;
mod commands_tests;

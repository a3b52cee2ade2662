mod check_test;
mod cli_test;
mod optimize_test;
mod properties;

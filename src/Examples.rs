pub mod calc_examples;

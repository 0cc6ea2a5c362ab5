pub mod constants;
pub mod errors;
pub mod game;
pub mod prompt;
pub mod solver;

#[cfg(test)]
mod tests;

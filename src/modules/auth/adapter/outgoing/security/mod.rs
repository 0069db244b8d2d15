pub mod random_code_generator;

pub use random_code_generator::RandomCodeGenerator;

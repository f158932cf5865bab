mod and;
mod not;
mod or;

pub use and::sparql_and;
pub use not::NotRdfOp;
pub use or::sparql_or;

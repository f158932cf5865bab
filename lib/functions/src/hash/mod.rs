use crate::ScalarUnaryRdfOp;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use sparql_algebra_model::{EvalResult, SimpleLiteral, SimpleLiteralRef};

/// Generates an operator that returns the hex-encoded digest of a simple literal.
macro_rules! create_hash_op {
    ($NAME: ident, $HASHER: ty) => {
        #[derive(Debug)]
        pub struct $NAME;

        impl Default for $NAME {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $NAME {
            pub fn new() -> Self {
                Self {}
            }
        }

        impl ScalarUnaryRdfOp for $NAME {
            type Arg<'data> = SimpleLiteralRef<'data>;
            type Result<'data> = SimpleLiteral;

            fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
                let hash = hex::encode(<$HASHER>::new().chain_update(value.value).finalize());
                Ok(SimpleLiteral::new(hash))
            }
        }
    };
}

create_hash_op!(Md5RdfOp, Md5);
create_hash_op!(Sha1RdfOp, Sha1);
create_hash_op!(Sha256RdfOp, Sha256);
create_hash_op!(Sha384RdfOp, Sha384);
create_hash_op!(Sha512RdfOp, Sha512);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_of_abc() {
        let result = Md5RdfOp::new().evaluate(SimpleLiteralRef::new("abc")).unwrap();
        assert_eq!(result.value, "900150983cd24fce21d3d3d06f7c6f97");
    }

    #[test]
    fn sha1_of_abc() {
        let result = Sha1RdfOp::new().evaluate(SimpleLiteralRef::new("abc")).unwrap();
        assert_eq!(result.value, "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn sha256_of_abc() {
        let result = Sha256RdfOp::new()
            .evaluate(SimpleLiteralRef::new("abc"))
            .unwrap();
        assert_eq!(
            result.value,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}

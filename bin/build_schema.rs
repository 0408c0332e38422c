//! Binary for generating contract schemas from odra modules.

#[allow(unused_imports)]
use distributor_contracts;

fn main() {
    // This binary is used by the Odra build system to emit contract schemas
    // The actual generation is handled by the odra-build crate
}

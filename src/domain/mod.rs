// Domain layer: catalog entities and store ports. No dependencies beyond serde
// and the decimal money type.

pub mod model;
pub mod ports;

// Event messages the reconstruction reacts to. Anything else is ignored.
pub const RESOURCE_MINED: &str = "Finished mining a resource.";
pub const BLOCK_MINED: &str = "Finished mining a block of resources.";
pub const LORRY_FILLED: &str = "Lorry has been filled.";
pub const LORRY_AT_FERRY: &str = "Lorry has arrived at the ferry.";
pub const LORRY_AT_DESTINATION: &str = "Lorry has arrived at the destination.";
pub const FERRY_DEPARTED: &str = "Ferry has departed from the origin shore.";

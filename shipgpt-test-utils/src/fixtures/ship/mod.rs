use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn ship<'a>(&'a mut self) -> ShipFixtures<'a> {
        ShipFixtures { setup: self }
    }
}

pub struct ShipFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

//! Given steps for board lifecycle BDD scenarios.

use super::world::BoardWorld;
use eyre::ensure;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &BoardWorld) -> Result<(), eyre::Report> {
    ensure!(world.controller.store().count() == 0);
    Ok(())
}

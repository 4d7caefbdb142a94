//! Schnorr verification gate

use clap::Parser;
use gate::cmd::App;

fn main() -> anyhow::Result<()> {
    let app = App::try_parse()?;
    app.run()
}

use crate::App;

pub fn run(app: App) -> anyhow::Result<()> {
    print!("{}", app.config.to_toml()?);
    Ok(())
}

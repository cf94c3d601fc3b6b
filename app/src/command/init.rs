use wordbank_config::Config;

/// Strategy for creating `~/wordbank/config.json` from the template.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        Config::create_config()?;
        Ok(())
    }
}

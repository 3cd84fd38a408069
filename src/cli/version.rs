//! Version command handler.

use color_eyre::Result;

use super::App;

impl App {
    /// Print the server version.
    pub async fn run_version(&self) -> Result<()> {
        let client = self.client()?;
        let version = client.version().await?;

        println!("version: {}", version.version);
        for (name, value) in [
            ("core", &version.core),
            ("gremlin", &version.gremlin),
            ("api", &version.api),
        ] {
            if let Some(value) = value {
                println!("{name}: {value}");
            }
        }
        Ok(())
    }
}

//! Module for the "styles" command.

use super::*;

/// Function for the [`Commands::Styles`] in the CLI.
pub fn styles<I: UserInteraction>(interaction: &I, registry: &StyleRegistry) -> Result<()> {
  interaction.reply(ResponseContent::Styles(&registry.names()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::interaction::testing::Recorder;

  #[test]
  fn test_lists_registered_styles() {
    let recorder = Recorder::default();
    styles(&recorder, &StyleRegistry::default()).unwrap();
    assert_eq!(recorder.stdout.borrow().as_str(), "chicago\nmla\n");
  }
}

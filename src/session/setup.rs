//! Choosing what to play before a round starts

use super::boundary::Chooser;
use super::orchestrator::SessionError;
use crate::core::{Catalog, Category, Difficulty};
use crate::selection::{SelectionError, Selector};
use rand::TryRngCore;
use tracing::info;

/// How missing choices are filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupMode {
    /// Ask the player through menus
    #[default]
    Interactive,
    /// Draw at random
    Random,
}

/// Settle the category and difficulty for a round
///
/// A known `requested` difficulty is used as given. Otherwise the difficulty,
/// and always the category, come from the chooser or the selector depending
/// on `mode`. Difficulty is settled first.
///
/// # Errors
/// `Input` when the player cancels a menu, `Selection` when the catalog is
/// empty or the random source fails.
pub fn resolve_round<'c, R, C>(
    catalog: &'c Catalog,
    requested: Difficulty,
    mode: SetupMode,
    selector: &mut Selector<R>,
    chooser: &mut C,
) -> Result<(&'c Category, Difficulty), SessionError>
where
    R: TryRngCore,
    C: Chooser + ?Sized,
{
    let categories = catalog.categories();
    if categories.is_empty() {
        return Err(SelectionError::EmptyInput.into());
    }

    let difficulty = if requested.is_known() {
        requested
    } else {
        match mode {
            SetupMode::Random => selector.choose_difficulty()?,
            SetupMode::Interactive => {
                let labels: Vec<String> = Difficulty::TIERS
                    .iter()
                    .map(|tier| tier.label().to_string())
                    .collect();
                let index = chooser.choose("Choose difficulty:", &labels)?;
                Difficulty::TIERS
                    .get(index)
                    .copied()
                    .ok_or(SelectionError::InvalidDifficulty(Difficulty::Unknown))?
            }
        }
    };
    info!(%difficulty, "Difficulty settled");

    let category = match mode {
        SetupMode::Random => selector.choose_category(categories)?,
        SetupMode::Interactive => {
            let names: Vec<String> = categories.iter().map(|c| c.name().to_string()).collect();
            let index = chooser.choose("Choose category:", &names)?;
            categories.get(index).ok_or(SelectionError::EmptyInput)?
        }
    };
    info!(category = category.name(), "Category settled");

    Ok((category, difficulty))
}

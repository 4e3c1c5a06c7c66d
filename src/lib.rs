//! Shopster library exports for testing

use clap::ValueEnum;

use crate::core::catalog::Category;
use crate::core::filter::CategoryFilter;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Initial filter accepted on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    #[default]
    All,
    Produce,
    Dairy,
    Dessert,
}

impl From<CategoryArg> for CategoryFilter {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => CategoryFilter::All,
            CategoryArg::Produce => CategoryFilter::Only(Category::Produce),
            CategoryArg::Dairy => CategoryFilter::Only(Category::Dairy),
            CategoryArg::Dessert => CategoryFilter::Only(Category::Dessert),
        }
    }
}

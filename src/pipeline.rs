//! Validation → pagination → rendering, and the state that drives it
//!
//! [`generate`] is the whole pipeline as a pure function. [`PriceList`] owns
//! the current catalog and capacities and reruns the pipeline each time one
//! of them changes, handing the result to a [`Presenter`].

use crate::catalog::Catalog;
use crate::config::PaginationConfig;
use crate::error::Result;
use crate::paginate::paginate;
use crate::render::{render_all, RenderedPage};

/// Consumer of finished pages, e.g. a document writer
pub trait Presenter {
    fn present(&mut self, pages: &[RenderedPage]) -> Result<()>;
}

/// Paginate and render a catalog
pub fn generate(catalog: &Catalog, pagination: &PaginationConfig) -> Result<Vec<RenderedPage>> {
    log::info!("Total items: {}", catalog.item_count());

    let descriptors = paginate(
        catalog,
        pagination.first_page_capacity,
        pagination.regular_page_capacity,
    )?;

    Ok(render_all(&descriptors))
}

/// A new input for [`PriceList::on_input_changed`]
#[derive(Debug, Clone)]
pub enum InputChange {
    Catalog(Catalog),
    Pagination(PaginationConfig),
}

/// Current catalog and capacities, re-presented in full on every change
pub struct PriceList<P: Presenter> {
    catalog: Option<Catalog>,
    pagination: PaginationConfig,
    presenter: P,
}

impl<P: Presenter> PriceList<P> {
    pub fn new(pagination: PaginationConfig, presenter: P) -> Self {
        Self {
            catalog: None,
            pagination,
            presenter,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Access the presenter, e.g. to switch its theme before [`refresh`](Self::refresh)
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Apply a change and present the recomputed pages
    ///
    /// The change is kept only if the pipeline succeeds with it; on error the
    /// previous catalog and capacities stay in place. Until a catalog has been
    /// loaded there is nothing to present and capacity changes are just stored.
    pub fn on_input_changed(&mut self, change: InputChange) -> Result<()> {
        match change {
            InputChange::Catalog(catalog) => {
                let pages = generate(&catalog, &self.pagination)?;
                self.presenter.present(&pages)?;
                self.catalog = Some(catalog);
            }
            InputChange::Pagination(pagination) => {
                if let Some(catalog) = &self.catalog {
                    let pages = generate(catalog, &pagination)?;
                    self.presenter.present(&pages)?;
                } else {
                    pagination.validate()?;
                }
                self.pagination = pagination;
            }
        }
        Ok(())
    }

    /// Present the current catalog again with unchanged inputs
    pub fn refresh(&mut self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            let pages = generate(catalog, &self.pagination)?;
            self.presenter.present(&pages)?;
        }
        Ok(())
    }
}

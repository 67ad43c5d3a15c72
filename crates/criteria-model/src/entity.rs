//! Entity-specific criteria: an entity registers its columns exactly once,
//! while the criteria set is being built.

use std::any;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use criteria_core::config::criteria::CriteriaConfig;
use criteria_core::types::UNLIMITED_RESULTS;
use criteria_core::types::value_type::short_type_name;

use crate::criteria::Criteria;

/// An entity that exposes its fields as criteria columns.
///
/// Implementors bind each column to accessor closures over the shared entity
/// (see [`crate::field::accessors`]); the set never inspects the entity any
/// other way.
pub trait CriteriaEntity: Send + Sync + 'static {
    /// Register every column on `criteria`. Called once per criteria set.
    fn add_columns(self: &Arc<Self>, criteria: &Criteria);
}

/// A criteria set owning its entity.
///
/// Every constructor runs [`CriteriaEntity::add_columns`] before returning,
/// so a partially registered set is never observable.
pub struct EntityCriteria<E> {
    entity: Arc<E>,
    criteria: Criteria,
}

impl<E: CriteriaEntity> EntityCriteria<E> {
    /// Criteria with no table name and no result cap.
    pub fn new(entity: E) -> Self {
        Self::build(entity, None, UNLIMITED_RESULTS)
    }

    /// Criteria for the given table, with no result cap.
    pub fn with_table_name(entity: E, table_name: impl Into<String>) -> Self {
        Self::build(entity, Some(table_name.into()), UNLIMITED_RESULTS)
    }

    /// Criteria for the given table and result cap.
    pub fn with_max_results(entity: E, table_name: impl Into<String>, max_results: i32) -> Self {
        Self::build(entity, Some(table_name.into()), max_results)
    }

    /// Criteria seeded from configured session defaults.
    pub fn from_config(entity: E, config: &CriteriaConfig) -> Self {
        let this = Self::build(entity, config.table_name.clone(), config.max_results);
        this.criteria.set_where_logic(Some(config.where_logic.as_str()));
        this
    }

    fn build(entity: E, table_name: Option<String>, max_results: i32) -> Self {
        let entity = Arc::new(entity);
        let criteria = Criteria::build(
            short_type_name(any::type_name::<E>()),
            table_name,
            max_results,
        );
        entity.add_columns(&criteria);
        Self { entity, criteria }
    }

    /// The entity whose fields the columns are bound to.
    pub fn entity(&self) -> &Arc<E> {
        &self.entity
    }

    /// The underlying criteria set.
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }
}

impl<E> Deref for EntityCriteria<E> {
    type Target = Criteria;

    fn deref(&self) -> &Self::Target {
        &self.criteria
    }
}

impl<E> fmt::Display for EntityCriteria<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.criteria, f)
    }
}

impl<E: fmt::Debug> fmt::Debug for EntityCriteria<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityCriteria")
            .field("entity", &self.entity)
            .field("criteria", &self.criteria)
            .finish()
    }
}

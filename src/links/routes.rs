use std::collections::BTreeMap;

use crate::codec::EntityType;

/// 路由段错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Empty(EntityType),
    InvalidSegment { entity: EntityType, route: String },
    Duplicate { route: String },
    Missing(EntityType),
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(entity) => write!(f, "route for '{}' cannot be empty", entity),
            Self::InvalidSegment { entity, route } => write!(
                f,
                "route '{}' for '{}' must be a single path segment of [A-Za-z0-9_-]",
                route, entity
            ),
            Self::Duplicate { route } => write!(f, "route '{}' is used by more than one entity", route),
            Self::Missing(entity) => write!(f, "no route configured for '{}'", entity),
        }
    }
}

impl std::error::Error for RouteError {}

/// 实体 <-> 应用路由段，一一对应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<EntityType, String>,
}

impl RouteTable {
    pub fn new<I, S>(entries: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = (EntityType, S)>,
        S: Into<String>,
    {
        let mut routes = BTreeMap::new();
        for (entity, route) in entries {
            let route = route.into().trim_matches('/').to_string();
            if route.is_empty() {
                return Err(RouteError::Empty(entity));
            }
            if !route
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
            {
                return Err(RouteError::InvalidSegment { entity, route });
            }
            if routes.values().any(|existing| *existing == route) {
                return Err(RouteError::Duplicate { route });
            }
            routes.insert(entity, route);
        }

        if let Some(missing) = EntityType::all().find(|e| !routes.contains_key(e)) {
            return Err(RouteError::Missing(missing));
        }

        Ok(Self { routes })
    }

    pub fn route_for(&self, entity: EntityType) -> &str {
        self.routes.get(&entity).map(String::as_str).unwrap_or(entity.tag())
    }

    pub fn entity_for(&self, route: &str) -> Option<EntityType> {
        let route = route.trim_matches('/');
        self.routes
            .iter()
            .find(|(_, r)| r.as_str() == route)
            .map(|(entity, _)| *entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityType, &str)> {
        self.routes.iter().map(|(e, r)| (*e, r.as_str()))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: BTreeMap::from([
                (EntityType::Project, "sp".to_string()),
                (EntityType::Proposal, "spr".to_string()),
            ]),
        }
    }
}

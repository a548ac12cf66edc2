//! Field selection: `fields=name,price` or `fields=-description`

use serde_json::Value;

use crate::error::QueryError;
use crate::field::MovieField;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldSelection {
    #[default]
    All,
    /// Only these fields (`id` included unless explicitly excluded)
    Include(Vec<MovieField>),
    /// Every field except these
    Exclude(Vec<MovieField>),
}

impl FieldSelection {
    /// Parse a comma (or whitespace) separated list.
    ///
    /// Inclusions and exclusions cannot be mixed, except that `-id` may
    /// accompany an inclusion list to drop the id.
    pub fn parse(raw: Option<&str>) -> Result<Self, QueryError> {
        let mut include = Vec::new();
        let mut exclude = Vec::new();

        for token in raw
            .unwrap_or_default()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            match token.strip_prefix('-') {
                Some(name) => push_unique(&mut exclude, name.parse()?),
                None => push_unique(&mut include, token.parse()?),
            }
        }

        if include.is_empty() {
            return Ok(if exclude.is_empty() {
                Self::All
            } else {
                Self::Exclude(exclude)
            });
        }

        if exclude.iter().any(|f| *f != MovieField::Id) {
            return Err(QueryError::MixedProjection);
        }
        if exclude.is_empty() {
            push_unique(&mut include, MovieField::Id);
        } else {
            include.retain(|f| *f != MovieField::Id);
        }
        Ok(Self::Include(include))
    }

    pub fn contains(&self, field: MovieField) -> bool {
        match self {
            Self::All => true,
            Self::Include(fields) => fields.contains(&field),
            Self::Exclude(fields) => !fields.contains(&field),
        }
    }

    /// Project a serialized movie object down to the selected keys.
    pub fn apply(&self, mut doc: Value) -> Value {
        if let (Some(map), false) = (doc.as_object_mut(), *self == Self::All) {
            map.retain(|key, _| {
                MovieField::from_api_name(key)
                    .map(|f| self.contains(f))
                    .unwrap_or(false)
            });
        }
        doc
    }
}

fn push_unique(fields: &mut Vec<MovieField>, field: MovieField) {
    if !fields.contains(&field) {
        fields.push(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "id": "6a0c0b1e-0000-4000-8000-000000000000",
            "name": "Heat",
            "price": 9.5,
            "description": "Heist"
        })
    }

    #[test]
    fn default_keeps_everything() {
        let sel = FieldSelection::parse(None).unwrap();
        assert_eq!(sel, FieldSelection::All);
        assert_eq!(sel.apply(doc()), doc());
    }

    #[test]
    fn inclusion_keeps_id() {
        let sel = FieldSelection::parse(Some("name,price")).unwrap();
        assert_eq!(
            sel,
            FieldSelection::Include(vec![MovieField::Name, MovieField::Price, MovieField::Id])
        );
        assert_eq!(
            sel.apply(doc()),
            json!({"id": "6a0c0b1e-0000-4000-8000-000000000000", "name": "Heat", "price": 9.5})
        );
    }

    #[test]
    fn inclusion_can_drop_id() {
        let sel = FieldSelection::parse(Some("name,-id")).unwrap();
        assert_eq!(sel.apply(doc()), json!({"name": "Heat"}));
    }

    #[test]
    fn exclusion() {
        let sel = FieldSelection::parse(Some("-description")).unwrap();
        let out = sel.apply(doc());
        assert!(out.get("description").is_none());
        assert!(out.get("name").is_some());
        assert!(out.get("id").is_some());
    }

    #[test]
    fn rejects_mixed() {
        let err = FieldSelection::parse(Some("name,-price")).unwrap_err();
        assert_eq!(err, QueryError::MixedProjection);
    }

    #[test]
    fn rejects_unknown() {
        let err = FieldSelection::parse(Some("name,__v")).unwrap_err();
        assert_eq!(err, QueryError::UnknownField("__v".into()));
    }
}

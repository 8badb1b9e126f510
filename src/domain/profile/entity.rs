use crate::domain::errors::DomainResult;
use crate::domain::validation::{ensure_char_len, ensure_positive_id};
use chrono::{DateTime, Utc};

pub const NAME_MAX: usize = 20;
pub const WECHAT_MAX: usize = 100;
pub const FIELD_MAX: usize = 200;

/// Id of the profile row inserted by the initial migration.
pub const SITE_PROFILE_ID: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub i64);

impl ProfileId {
    pub fn new(id: i64) -> DomainResult<Self> {
        ensure_positive_id("profile id", id)?;
        Ok(Self(id))
    }
}

impl From<ProfileId> for i64 {
    fn from(value: ProfileId) -> Self {
        value.0
    }
}

/// Site owner and contact details shown on the public pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: String,
    pub description: String,
    pub qq_chat: String,
    pub wechat: String,
    pub weibo: String,
    pub bili: String,
    pub email: String,
    pub img: String,
    pub avatar: String,
    pub icp_record: String,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub fields: ProfileFields,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub qq_chat: Option<String>,
    pub wechat: Option<String>,
    pub weibo: Option<String>,
    pub bili: Option<String>,
    pub email: Option<String>,
    pub img: Option<String>,
    pub avatar: Option<String>,
    pub icp_record: Option<String>,
}

impl ProfilePatch {
    pub fn validate(&self) -> DomainResult<()> {
        let limits = [
            ("name", &self.name, NAME_MAX),
            ("description", &self.description, FIELD_MAX),
            ("qq_chat", &self.qq_chat, FIELD_MAX),
            ("wechat", &self.wechat, WECHAT_MAX),
            ("weibo", &self.weibo, FIELD_MAX),
            ("bili", &self.bili, FIELD_MAX),
            ("email", &self.email, FIELD_MAX),
            ("img", &self.img, FIELD_MAX),
            ("avatar", &self.avatar, FIELD_MAX),
            ("icp_record", &self.icp_record, FIELD_MAX),
        ];
        for (field, value, max) in limits {
            if let Some(value) = value {
                ensure_char_len(field, value, 0, max)?;
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.description,
            &self.qq_chat,
            &self.wechat,
            &self.weibo,
            &self.bili,
            &self.email,
            &self.img,
            &self.avatar,
            &self.icp_record,
        ]
        .iter()
        .all(|field| field.is_none())
    }

    pub fn apply_to(&self, fields: &mut ProfileFields) {
        let pairs = [
            (&self.name, &mut fields.name),
            (&self.description, &mut fields.description),
            (&self.qq_chat, &mut fields.qq_chat),
            (&self.wechat, &mut fields.wechat),
            (&self.weibo, &mut fields.weibo),
            (&self.bili, &mut fields.bili),
            (&self.email, &mut fields.email),
            (&self.img, &mut fields.img),
            (&self.avatar, &mut fields.avatar),
            (&self.icp_record, &mut fields.icp_record),
        ];
        for (source, target) in pairs {
            if let Some(value) = source {
                target.clone_from(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_limits_per_field() {
        let patch = ProfilePatch {
            wechat: Some("w".repeat(WECHAT_MAX + 1)),
            ..ProfilePatch::default()
        };
        assert!(patch.validate().is_err());

        let patch = ProfilePatch {
            email: Some("owner@example.com".into()),
            ..ProfilePatch::default()
        };
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn apply_leaves_unset_fields() {
        let mut fields = ProfileFields {
            name: "old".into(),
            email: "old@example.com".into(),
            ..ProfileFields::default()
        };
        let patch = ProfilePatch {
            name: Some("new".into()),
            ..ProfilePatch::default()
        };
        assert!(!patch.is_empty());
        patch.apply_to(&mut fields);
        assert_eq!(fields.name, "new");
        assert_eq!(fields.email, "old@example.com");
    }
}

use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{Profile, ProfileFields, ProfileId, ProfilePatch, ProfileRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, description, qq_chat, wechat, weibo, bili, email, img, avatar, \
     icp_record, updated_at";

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    name: String,
    description: String,
    qq_chat: String,
    wechat: String,
    weibo: String,
    bili: String,
    email: String,
    img: String,
    avatar: String,
    icp_record: String,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            id: ProfileId::new(row.id)?,
            fields: ProfileFields {
                name: row.name,
                description: row.description,
                qq_chat: row.qq_chat,
                wechat: row.wechat,
                weibo: row.weibo,
                bili: row.bili,
                email: row.email,
                img: row.img,
                avatar: row.avatar,
                icp_record: row.icp_record,
            },
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn update(
        &self,
        id: ProfileId,
        patch: ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Profile> {
        let ProfilePatch {
            name,
            description,
            qq_chat,
            wechat,
            weibo,
            bili,
            email,
            img,
            avatar,
            icp_record,
        } = patch;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE profiles SET updated_at = ");
        builder.push_bind(updated_at);

        let columns = [
            ("name", name),
            ("description", description),
            ("qq_chat", qq_chat),
            ("wechat", wechat),
            ("weibo", weibo),
            ("bili", bili),
            ("email", email),
            ("img", img),
            ("avatar", avatar),
            ("icp_record", icp_record),
        ];
        for (column, value) in columns {
            if let Some(value) = value {
                builder.push(", ");
                builder.push(column);
                builder.push(" = ");
                builder.push_bind(value);
            }
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let row = builder
            .build_query_as::<ProfileRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("profile not found".into()))?;

        Profile::try_from(row)
    }
}

use crate::domain::profile::Profile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDto {
    pub id: i64,
    pub name: String,
    pub desc: String,
    pub qq_chat: String,
    pub wechat: String,
    pub weibo: String,
    pub bili: String,
    pub email: String,
    pub img: String,
    pub avatar: String,
    pub icp_record: String,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        let fields = profile.fields;
        Self {
            id: profile.id.into(),
            name: fields.name,
            desc: fields.description,
            qq_chat: fields.qq_chat,
            wechat: fields.wechat,
            weibo: fields.weibo,
            bili: fields.bili,
            email: fields.email,
            img: fields.img,
            avatar: fields.avatar,
            icp_record: fields.icp_record,
        }
    }
}

use sea_orm::entity::prelude::*;

/// Mapping from an original message to its repost in the starboard channel.
///
/// Both ids are Discord snowflakes stored as text so they never lose precision.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "star_message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub original_id: String,
    #[sea_orm(indexed)]
    pub reposted_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::*;
use crate::entities::{permission, policy, role, role::Entity as Role};

pub struct RoleRepository;

impl RoleRepository {
    // Active role by its unique name
    pub async fn find_by_name<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> Result<Option<role::Model>, DbErr> {
        Role::find()
            .filter(role::Column::Role.eq(name))
            .filter(role::Column::Deleted.is_null())
            .one(db)
            .await
    }

    // Active policies granted to the role through active permissions
    pub async fn policies_of<C: ConnectionTrait>(
        db: &C,
        role: &role::Model,
    ) -> Result<Vec<policy::Model>, DbErr> {
        role.find_related(policy::Entity)
            .filter(policy::Column::Deleted.is_null())
            .filter(permission::Column::Deleted.is_null())
            .order_by_asc(policy::Column::PolicyName)
            .all(db)
            .await
    }
}

use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Users {
    Table,
    UserId,
    Email,
    FirstName,
    LastName,
    Dob,
    Address,
}

use crate::ast::ty::Type;

#[derive(Clone, Debug)]
pub struct VarDecl {
    ty: Type,
    name: String,
}

impl VarDecl {
    pub fn new(ty: Type, name: String) -> Self {
        VarDecl { ty, name }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

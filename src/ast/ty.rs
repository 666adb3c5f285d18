#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Void,
    Ptr(Box<PtrType>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PtrType {
    pointee: Type,
}

impl PtrType {
    pub fn new(pointee: Type) -> Self {
        PtrType { pointee }
    }

    pub fn pointee(&self) -> &Type {
        &self.pointee
    }
}

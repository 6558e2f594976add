/// Uma assinatura Azure enumerada via `az account list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: String,
    pub name: String,
}

/// Um grupo de recursos candidato à deleção. Imutável após a enumeração.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    pub name: String,
    pub subscription_id: String,
    pub subscription_name: String,
}

impl ResourceGroup {
    pub fn new(
        name: impl Into<String>,
        subscription_id: impl Into<String>,
        subscription_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            subscription_id: subscription_id.into(),
            subscription_name: subscription_name.into(),
        }
    }

    /// Nome qualificado para exibição: `assinatura.grupo`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.subscription_name, self.name)
    }
}

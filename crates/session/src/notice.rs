/// Dismissible notice shown after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Submit attempted with nothing in the cart.
    EmptyCart,
    /// Submit blocked by field errors.
    FixErrors,
    /// Order confirmed.
    OrderPlaced,
    /// Clear attempted with no cart, in memory or persisted.
    NothingToClear,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EmptyCart => "Actualmente no hay datos de pedido.",
            Notice::FixErrors => "Por favor, corrige los errores en el formulario.",
            Notice::OrderPlaced => "¡Pedido registrado correctamente! Gracias por tu compra ♥",
            Notice::NothingToClear => "No hay pedido para borrar",
        }
    }

    /// Whether the notice reports an aborted action.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Notice::OrderPlaced)
    }
}

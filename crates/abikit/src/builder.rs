//! Programmatic interface construction

use crate::event::Event;
use crate::interface::Interface;
use crate::method::{Constructor, Method};
use crate::param::Param;
use crate::types::ParamType;

/// Builder for interfaces defined in code rather than loaded from JSON
#[derive(Debug, Default)]
pub struct InterfaceBuilder {
    interface: Interface,
}

impl InterfaceBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the constructor inputs
    pub fn constructor(mut self, inputs: Vec<Param>) -> Self {
        self.interface.set_constructor(Constructor::new(inputs));
        self
    }

    /// Add a method; a later method with the same name replaces it
    pub fn method(mut self, method: Method) -> Self {
        self.interface.insert_method(method);
        self
    }

    /// Add a non-constant method with unnamed parameters
    pub fn function(self, name: &str, inputs: Vec<ParamType>, outputs: Vec<ParamType>) -> Self {
        self.method(Method::new(name, unnamed(inputs), unnamed(outputs)))
    }

    /// Add a constant method with unnamed parameters
    pub fn view(self, name: &str, inputs: Vec<ParamType>, outputs: Vec<ParamType>) -> Self {
        let mut method = Method::new(name, unnamed(inputs), unnamed(outputs));
        method.constant = true;
        self.method(method)
    }

    /// Add an event
    pub fn event(mut self, event: Event) -> Self {
        self.interface.insert_event(event);
        self
    }

    /// Build the interface
    pub fn build(self) -> Interface {
        self.interface.report_clashes();
        self.interface
    }
}

fn unnamed(types: Vec<ParamType>) -> Vec<Param> {
    types.into_iter().map(|ty| Param::new("", ty)).collect()
}

/// The standard ERC20 token interface
pub fn erc20() -> Interface {
    let uint256 = || ParamType::Uint(256);

    InterfaceBuilder::new()
        .view("name", vec![], vec![ParamType::String])
        .view("symbol", vec![], vec![ParamType::String])
        .view("decimals", vec![], vec![ParamType::Uint(8)])
        .view("totalSupply", vec![], vec![uint256()])
        .view("balanceOf", vec![ParamType::Address], vec![uint256()])
        .view(
            "allowance",
            vec![ParamType::Address, ParamType::Address],
            vec![uint256()],
        )
        .function(
            "transfer",
            vec![ParamType::Address, uint256()],
            vec![ParamType::Bool],
        )
        .function(
            "approve",
            vec![ParamType::Address, uint256()],
            vec![ParamType::Bool],
        )
        .function(
            "transferFrom",
            vec![ParamType::Address, ParamType::Address, uint256()],
            vec![ParamType::Bool],
        )
        .event(Event::new(
            "Transfer",
            vec![
                Param::indexed("from", ParamType::Address),
                Param::indexed("to", ParamType::Address),
                Param::new("value", uint256()),
            ],
        ))
        .event(Event::new(
            "Approval",
            vec![
                Param::indexed("owner", ParamType::Address),
                Param::indexed("spender", ParamType::Address),
                Param::new("value", uint256()),
            ],
        ))
        .build()
}

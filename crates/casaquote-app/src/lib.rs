// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod catalog;
pub mod forms;
pub mod model;
pub mod notices;
pub mod validation;
pub mod whatsapp;

pub use catalog::*;
pub use forms::*;
pub use model::*;
pub use notices::*;
pub use whatsapp::*;

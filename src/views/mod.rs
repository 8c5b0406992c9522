//! Pages of the dashboard.
//!
//! Each page module has a `load` step that calls the API facade and folds the
//! envelopes into a view enum, and a `render` step that writes that enum as
//! text. Loading never fails; failures are variants carrying the backend's
//! error text. Empty data ("no current sprint") gets its own variant and
//! renders as information, not as an error.
//!
//! | Module       | Page                                   |
//! |--------------|----------------------------------------|
//! | `health`     | backend connectivity banner            |
//! | `dashboard`  | current sprint metrics                 |
//! | `work_items` | list / create / show / update / delete |
//! | `analysis`   | AI sprint analysis                     |
//! | `control`    | MCP server status, commands, queries   |

pub mod analysis;
pub mod control;
pub mod dashboard;
pub mod health;
pub mod work_items;

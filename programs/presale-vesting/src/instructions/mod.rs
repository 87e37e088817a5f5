pub mod initialize;
pub mod fund;
pub mod withdraw;
pub mod pause;
pub mod resume;
pub mod update_authority;
pub mod init_vesting;
pub mod execute_sale;
pub mod claim;
pub mod close_vesting;

pub use initialize::*;
pub use fund::*;
pub use withdraw::*;
pub use pause::*;
pub use resume::*;
pub use update_authority::*;
pub use init_vesting::*;
pub use execute_sale::*;
pub use claim::*;
pub use close_vesting::*;

pub mod update_avatar;

mod cart;
mod category;
mod group;
mod order;
mod user;

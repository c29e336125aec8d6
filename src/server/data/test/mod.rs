mod participation;
mod trip;
mod user;

mod comments;
mod extract;
mod photos;

//! Dockerfile and docker-compose emitter

use crate::error::Result;
use crate::setup::write_file;
use crate::templates::ProjectKind;
use std::path::Path;

/// Write a `Dockerfile` and `docker-compose.yml` tuned to the project
/// type. Types without dedicated content get commented placeholders.
pub fn setup(dir: &Path, kind: ProjectKind) -> Result<()> {
    write_file(&dir.join("Dockerfile"), dockerfile(kind))?;
    write_file(&dir.join("docker-compose.yml"), compose(kind))
}

fn dockerfile(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Go => GO_DOCKERFILE,
        ProjectKind::NextJs => NEXTJS_DOCKERFILE,
        _ => "# Add your Dockerfile content here",
    }
}

fn compose(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Go => GO_COMPOSE,
        ProjectKind::NextJs => NEXTJS_COMPOSE,
        _ => "# Add your docker-compose.yml content here",
    }
}

const GO_DOCKERFILE: &str = r#"FROM golang:1.16-alpine
WORKDIR /app
COPY . .
RUN go build -o main .
CMD ["./main"]"#;

const NEXTJS_DOCKERFILE: &str = r#"FROM node:14-alpine
WORKDIR /app
COPY package*.json ./
RUN npm install
COPY . .
RUN npm run build
CMD ["npm", "start"]"#;

const GO_COMPOSE: &str = r#"version: '3'
services:
  app:
    build: .
    ports:
      - "8080:8080""#;

const NEXTJS_COMPOSE: &str = r#"version: '3'
services:
  app:
    build: .
    ports:
      - "3000:3000""#;
